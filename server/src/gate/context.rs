//! Per-request authorization context.

/// Identity and route scope of the request being authorized.
///
/// Inserted into request extensions by [`crate::auth::require_auth`], so a
/// context cannot exist without a caller. Gate stages read it through the
/// `Extension` extractor and handlers receive it fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    caller_id: u64,
    guild_id: Option<u64>,
}

impl RequestContext {
    /// Context for an identified caller with no guild resolved yet.
    pub const fn new(caller_id: u64) -> Self {
        Self {
            caller_id,
            guild_id: None,
        }
    }

    /// ID of the authenticated user.
    pub const fn caller_id(&self) -> u64 {
        self.caller_id
    }

    /// Guild from the route, once the guild ID stage has parsed it.
    pub const fn guild_id(&self) -> Option<u64> {
        self.guild_id
    }

    pub(crate) fn set_guild_id(&mut self, guild_id: u64) {
        self.guild_id = Some(guild_id);
    }
}
