use std::sync::Arc;

use tracing::{info, warn};

use crate::api::CacheApi;
use crate::dialog::{Confirmation, Notification};
use crate::messages::Message;
use crate::page::{AddForm, DeleteControl, PageControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator declined; nothing was sent
    Cancelled,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Failed,
}

/// Forwards delete clicks and add-form submits to the cache API.
///
/// Each operation awaits its request before asking the page to reload, so a
/// failure alert is always raised ahead of the reload.
pub struct AdminPanel<C, N> {
    api: Arc<dyn CacheApi>,
    confirmation: C,
    notification: N,
}

impl<C, N> AdminPanel<C, N>
where
    C: Confirmation,
    N: Notification,
{
    pub fn new(api: Arc<dyn CacheApi>, confirmation: C, notification: N) -> Self {
        Self {
            api,
            confirmation,
            notification,
        }
    }

    pub fn notification(&self) -> &N {
        &self.notification
    }

    pub async fn on_delete_click(
        &self,
        control: &DeleteControl,
        page: &mut dyn PageControl,
    ) -> DeleteOutcome {
        if !self.confirmation.confirm(Message::ConfirmDelete) {
            info!("Delete of {} cancelled by operator", control.key());
            return DeleteOutcome::Cancelled;
        }

        let outcome = match self.api.delete(&control.to_request()).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                warn!("Failed to delete {}: {}", control.key(), e);
                self.notification.alert(Message::DeleteFailed);
                DeleteOutcome::Failed
            }
        };

        page.reload();
        outcome
    }

    /// Handles the add form in place of its native submission
    pub async fn on_add_submit(&self, form: &AddForm, page: &mut dyn PageControl) -> InsertOutcome {
        let request = form.to_request();

        let outcome = match self.api.insert(&request).await {
            Ok(()) => InsertOutcome::Inserted,
            Err(e) => {
                warn!("Failed to insert {}: {}", request.key, e);
                self.notification.alert(Message::InsertFailed);
                InsertOutcome::Failed
            }
        };

        page.reload();
        outcome
    }
}
