use super::server::OrderStatus;

/// Phases of one order submission, from form submit to settled saga.
///
/// The page holds this in a signal; every transition is a pure method so the
/// sequencing can be exercised without a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
  Idle,
  /// Placement POST in flight. The status subscription is already up.
  Placing,
  /// Placement accepted; waiting on the status topic.
  Tracking { last: Option<OrderStatus> },
  /// Terminal status received; the view reload has been triggered.
  Settled(OrderStatus),
}

impl SubmissionPhase {
  /// Form submitted. Callers gate re-entry with [`Self::can_submit`].
  pub fn submit(&self) -> SubmissionPhase {
    SubmissionPhase::Placing
  }

  /// Placement POST accepted.
  pub fn placed(&self) -> SubmissionPhase {
    match self {
      // a fast saga may settle before the POST future resolves
      SubmissionPhase::Placing => SubmissionPhase::Tracking { last: None },
      other => *other,
    }
  }

  /// Placement POST failed; back to the form.
  pub fn rejected(&self) -> SubmissionPhase {
    match self {
      SubmissionPhase::Placing => SubmissionPhase::Idle,
      other => *other,
    }
  }

  /// A message arrived on the status topic.
  pub fn on_status(&self, status: OrderStatus) -> SubmissionPhase {
    match self {
      SubmissionPhase::Placing | SubmissionPhase::Tracking { .. } => {
        if status.is_terminal() {
          SubmissionPhase::Settled(status)
        } else if let SubmissionPhase::Placing = self {
          // keep showing "Placing order" until the POST resolves
          SubmissionPhase::Placing
        } else {
          SubmissionPhase::Tracking { last: Some(status) }
        }
      }
      other => *other,
    }
  }

  /// The submit button stays enabled except while the POST is in flight.
  pub fn can_submit(&self) -> bool {
    !matches!(self, SubmissionPhase::Placing)
  }

  /// Text for the order-status element.
  pub fn status_line(&self) -> String {
    match self {
      SubmissionPhase::Idle => String::new(),
      SubmissionPhase::Placing => "Placing order".to_string(),
      SubmissionPhase::Tracking { last: None } => "Order placed".to_string(),
      SubmissionPhase::Tracking { last: Some(status) } => status.to_string(),
      SubmissionPhase::Settled(status) => status.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn happy_path_reaches_settled() {
    let phase = SubmissionPhase::Idle
      .submit()
      .placed()
      .on_status(OrderStatus::Pending)
      .on_status(OrderStatus::Completed);

    assert_eq!(phase, SubmissionPhase::Settled(OrderStatus::Completed));
  }

  #[test]
  fn status_line_follows_the_submission() {
    let submitted = SubmissionPhase::Idle.submit();
    assert_eq!(submitted.status_line(), "Placing order");

    let placed = submitted.placed();
    assert_eq!(placed.status_line(), "Order placed");

    let pending = placed.on_status(OrderStatus::Pending);
    assert_eq!(pending.status_line(), "PENDING");

    let failed = pending.on_status(OrderStatus::Failed);
    assert_eq!(failed.status_line(), "FAILED");
  }

  #[test]
  fn terminal_update_during_post_settles_immediately() {
    // the subscription is opened before the POST, so a fast saga can finish
    // while the placement future is still pending
    let phase = SubmissionPhase::Idle.submit().on_status(OrderStatus::Completed);
    assert_eq!(phase, SubmissionPhase::Settled(OrderStatus::Completed));

    // the late POST acknowledgement must not reopen tracking
    assert_eq!(phase.placed(), phase);
  }

  #[test]
  fn rejection_returns_to_idle() {
    let phase = SubmissionPhase::Idle.submit().rejected();
    assert_eq!(phase, SubmissionPhase::Idle);
    assert!(phase.can_submit());
  }

  #[test]
  fn submit_gates_while_placing_only() {
    assert!(SubmissionPhase::Idle.can_submit());
    assert!(!SubmissionPhase::Placing.can_submit());
    assert!(SubmissionPhase::Tracking { last: None }.can_submit());
    assert!(SubmissionPhase::Settled(OrderStatus::Completed).can_submit());
  }

  #[test]
  fn updates_are_ignored_when_nothing_is_tracked() {
    let phase = SubmissionPhase::Idle.on_status(OrderStatus::Completed);
    assert_eq!(phase, SubmissionPhase::Idle);

    let settled = SubmissionPhase::Settled(OrderStatus::Failed).on_status(OrderStatus::Pending);
    assert_eq!(settled, SubmissionPhase::Settled(OrderStatus::Failed));
  }

  #[test]
  fn resubmission_starts_a_fresh_cycle() {
    let settled = SubmissionPhase::Settled(OrderStatus::Failed);
    assert_eq!(settled.submit(), SubmissionPhase::Placing);
  }
}
