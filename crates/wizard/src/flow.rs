//! The wizard state machine.
//!
//! One [`WizardFlow`] instance drives one guest session. Transitions validate
//! input, call the backend, and swap the current [`StepView`]; when a
//! transition fails the flow stays exactly where it was so the guest can
//! retry or reset.

use chrono::Utc;
use confirma_core::model::{Member, RsvpKind, RsvpResponse, RsvpSubmission};
use confirma_core::validation::{self, IdRules};
use confirma_gateway::RsvpBackend;

use crate::error::WizardError;
use crate::event::EventDetails;
use crate::views::{
    AccompaniedView, AdditionalView, ConfirmationView, ExistingResponseView, InvitationView,
    SearchView, StepView,
};

/// The steps a guest walks through. The invitation step also hosts the
/// previous-answer screen when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Search,
    Invitation,
    Accompanied,
    Additional,
    Confirmation,
}

impl WizardStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Invitation => "invitation",
            Self::Accompanied => "accompanied",
            Self::Additional => "additional",
            Self::Confirmation => "confirmation",
        }
    }
}

/// State machine for one guest session over backend `B`.
pub struct WizardFlow<B> {
    backend: B,
    rules: IdRules,
    details: EventDetails,
    step: WizardStep,
    view: StepView,
    member: Option<Member>,
    selected: Option<RsvpKind>,
    companions: i64,
    existing: Option<RsvpResponse>,
    editing_existing: bool,
}

impl<B: RsvpBackend> WizardFlow<B> {
    pub fn new(backend: B, rules: IdRules, details: EventDetails) -> Self {
        Self {
            backend,
            rules,
            details,
            step: WizardStep::Search,
            view: StepView::Search(SearchView::build()),
            member: None,
            selected: None,
            companions: 0,
            existing: None,
            editing_existing: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The screen the front end should render right now.
    pub fn view(&self) -> &StepView {
        &self.view
    }

    /// Look up a member by their national id entry. Separators are stripped
    /// before validation; validation rejects before any network call.
    pub async fn submit_national_id(&mut self, entry: &str) -> Result<(), WizardError> {
        self.guard(WizardStep::Search, "submit_national_id")?;

        let digits = validation::normalize_id(entry);
        let national_id = self.rules.validate(&digits)?;

        let member = self
            .backend
            .find_member_by_national_id(&national_id)
            .await?
            .ok_or(WizardError::MemberNotFound)?;
        tracing::debug!(member_id = member.id, "member found");

        let existing = self.backend.existing_response(member.id).await;

        self.step = WizardStep::Invitation;
        self.view = match &existing {
            Some(previous) => StepView::ExistingResponse(ExistingResponseView::build(previous)),
            None => StepView::Invitation(InvitationView::build(&member, &self.details, false)),
        };
        self.member = Some(member);
        self.existing = existing;
        self.editing_existing = false;
        self.selected = None;
        self.companions = 0;
        Ok(())
    }

    /// Swap the previous-answer screen for the options so the guest can
    /// answer again. The eventual submission updates the stored row.
    pub fn change_response(&mut self) -> Result<(), WizardError> {
        let member = match (&self.member, self.step) {
            (Some(member), WizardStep::Invitation)
                if self.existing.is_some() && !self.editing_existing =>
            {
                member
            }
            _ => {
                return Err(WizardError::InvalidTransition {
                    step: self.step,
                    action: "change_response",
                })
            }
        };
        self.view = StepView::Invitation(InvitationView::build(member, &self.details, true));
        self.editing_existing = true;
        Ok(())
    }

    /// Pick one of the three responses. A decline submits right away;
    /// attending or delegating first asks about companions.
    pub async fn select_kind(&mut self, kind: RsvpKind) -> Result<(), WizardError> {
        let options_shown = self.step == WizardStep::Invitation
            && (self.existing.is_none() || self.editing_existing);
        if !options_shown {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                action: "select_kind",
            });
        }

        self.selected = Some(kind);
        match kind {
            RsvpKind::Decline => {
                self.companions = 0;
                self.finalize().await
            }
            RsvpKind::Attend | RsvpKind::Delegate => {
                self.step = WizardStep::Accompanied;
                self.view = StepView::Accompanied(if kind == RsvpKind::Attend {
                    AccompaniedView::for_attendee()
                } else {
                    AccompaniedView::for_delegate()
                });
                Ok(())
            }
        }
    }

    /// Answer the companions yes/no question. "No" submits with zero.
    pub async fn set_accompanied(&mut self, accompanied: bool) -> Result<(), WizardError> {
        let kind = match (self.step, self.selected) {
            (WizardStep::Accompanied, Some(kind)) => kind,
            _ => {
                return Err(WizardError::InvalidTransition {
                    step: self.step,
                    action: "set_accompanied",
                })
            }
        };

        if !accompanied {
            self.companions = 0;
            return self.finalize().await;
        }

        self.step = WizardStep::Additional;
        self.view = StepView::Additional(if kind == RsvpKind::Delegate {
            AdditionalView::for_delegate()
        } else {
            AdditionalView::for_attendee()
        });
        Ok(())
    }

    /// Submit the companion count entry. Empty counts as zero.
    pub async fn submit_companions(&mut self, entry: &str) -> Result<(), WizardError> {
        self.guard(WizardStep::Additional, "submit_companions")?;
        self.companions = validation::validate_companions(entry)?;
        self.finalize().await
    }

    /// Full reset back to the search screen.
    pub fn start_over(&mut self) {
        self.step = WizardStep::Search;
        self.view = StepView::Search(SearchView::build());
        self.member = None;
        self.selected = None;
        self.companions = 0;
        self.existing = None;
        self.editing_existing = false;
    }

    /// Write the response and move to the confirmation screen. Updates the
    /// stored row when the guest is changing a previous answer, creates
    /// otherwise.
    async fn finalize(&mut self) -> Result<(), WizardError> {
        let (Some(member), Some(kind)) = (&self.member, self.selected) else {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                action: "submit_response",
            });
        };

        let submission = RsvpSubmission {
            member_id: member.id,
            kind,
            companions: self.companions,
            confirmed_at: Utc::now(),
        };

        let updated = match (&self.existing, self.editing_existing) {
            (Some(previous), true) => {
                self.backend.update_response(previous.id, &submission).await?;
                true
            }
            _ => {
                self.backend.create_response(&submission).await?;
                false
            }
        };
        tracing::info!(
            member_id = member.id,
            kind = kind.as_wire(),
            companions = self.companions,
            updated,
            "response submitted"
        );

        self.view = StepView::Confirmation(ConfirmationView::build(
            member,
            kind,
            self.companions,
            updated,
            &self.details,
        ));
        self.step = WizardStep::Confirmation;
        Ok(())
    }

    fn guard(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                step: self.step,
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_are_stable() {
        assert_eq!(WizardStep::Search.as_str(), "search");
        assert_eq!(WizardStep::Invitation.as_str(), "invitation");
        assert_eq!(WizardStep::Accompanied.as_str(), "accompanied");
        assert_eq!(WizardStep::Additional.as_str(), "additional");
        assert_eq!(WizardStep::Confirmation.as_str(), "confirmation");
    }
}
