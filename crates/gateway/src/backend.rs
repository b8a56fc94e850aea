//! The operations the flows need from the backend, as a trait so tests can
//! run against an in-memory fake.

use async_trait::async_trait;
use confirma_core::model::{Member, RsvpResponse, RsvpSubmission};
use confirma_core::types::DbId;

use crate::error::GatewayResult;
use crate::wire::StaffUser;

#[async_trait]
pub trait RsvpBackend: Send + Sync {
    /// Look up a member by national id. `None` when no row matches.
    async fn find_member_by_national_id(&self, national_id: &str) -> GatewayResult<Option<Member>>;

    /// Probe for a member's existing response. Soft: any failure is treated
    /// as "no existing response" so the public flow can continue.
    async fn existing_response(&self, member_id: DbId) -> Option<RsvpResponse>;

    /// Create a new response row.
    async fn create_response(&self, submission: &RsvpSubmission) -> GatewayResult<RsvpResponse>;

    /// Overwrite an existing response row.
    async fn update_response(
        &self,
        response_id: DbId,
        submission: &RsvpSubmission,
    ) -> GatewayResult<RsvpResponse>;

    /// Bulk load the member directory.
    async fn list_members(&self) -> GatewayResult<Vec<Member>>;

    /// Bulk load all response rows.
    async fn list_responses(&self) -> GatewayResult<Vec<RsvpResponse>>;

    /// Authenticate the staff user and keep the session token for later
    /// calls. The user object is absent on deployments that do not expose it.
    async fn login(&self, email: &str, password: &str) -> GatewayResult<Option<StaffUser>>;

    /// Drop the session token.
    fn logout(&self);
}
