//! Scheduled reminder broadcast.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::commands;
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::messenger::Messenger;

/// Outcome of one broadcast run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BroadcastSummary {
    /// Users with reminders enabled.
    pub total: usize,
    /// Reminders accepted by Telegram.
    pub sent: usize,
    /// Reminders that failed.
    pub failed: usize,
}

impl BroadcastSummary {
    /// One-line report for the operator chat.
    pub fn report(&self) -> String {
        format!(
            "Lembrete de pedido enviado: {} de {} entregues ({} falhas).",
            self.sent, self.total, self.failed
        )
    }
}

/// Sends the reminder to every opted-in user.
#[derive(Clone)]
pub struct Broadcaster {
    messenger: Arc<dyn Messenger>,
    directory: Arc<dyn UserDirectory>,
}

impl Broadcaster {
    pub fn new(messenger: Arc<dyn Messenger>, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            messenger,
            directory,
        }
    }

    /// Runs one broadcast.
    ///
    /// All sends run concurrently and each is attempted exactly once; a
    /// failed recipient does not stop the others. Only a failure to list the
    /// users is returned as an error.
    pub async fn run(&self) -> Result<BroadcastSummary> {
        let users = self.directory.list().await?;
        let recipients: Vec<_> = users
            .into_iter()
            .filter(|u| u.notifications_enabled)
            .map(|u| u.chat_id)
            .collect();

        let text = commands::reminder_text();
        let results = join_all(
            recipients
                .iter()
                .map(|chat_id| self.messenger.send_text(*chat_id, &text)),
        )
        .await;

        let sent = results.iter().filter(|r| r.is_ok()).count();
        let summary = BroadcastSummary {
            total: recipients.len(),
            sent,
            failed: recipients.len() - sent,
        };

        if summary.failed > 0 {
            warn!(total = summary.total, sent = summary.sent, failed = summary.failed, "Broadcast finished with failures");
        } else {
            info!(total = summary.total, sent = summary.sent, "Broadcast finished");
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Reply;
    use crate::testing::{MemoryDirectory, RecordingMessenger};
    use toolkit_core::{ChatId, User};

    fn users() -> Vec<User> {
        vec![
            User::new("1", 10, true),
            User::new("2", 20, false),
            User::new("3", 30, true),
            User::new("4", 40, true),
            User::new("5", 50, false),
        ]
    }

    #[tokio::test]
    async fn test_broadcast_reaches_only_enabled_users() {
        let messenger = Arc::new(RecordingMessenger::new());
        let directory = Arc::new(MemoryDirectory::with_users(users()));
        let broadcaster = Broadcaster::new(messenger.clone(), directory);

        let summary = broadcaster.run().await.unwrap();

        assert_eq!(
            summary,
            BroadcastSummary {
                total: 3,
                sent: 3,
                failed: 0
            }
        );
        let mut chats: Vec<ChatId> = messenger.sent().into_iter().map(|(c, _)| c).collect();
        chats.sort_by_key(|c| c.0);
        assert_eq!(chats, vec![ChatId(10), ChatId(30), ChatId(40)]);
        assert!(messenger
            .sent()
            .iter()
            .all(|(_, r)| *r == Reply::text(commands::reminder_text())));
    }

    #[tokio::test]
    async fn test_broadcast_counts_failures_without_aborting() {
        let messenger = Arc::new(RecordingMessenger::failing_for([30]));
        let directory = Arc::new(MemoryDirectory::with_users(users()));
        let broadcaster = Broadcaster::new(messenger.clone(), directory);

        let summary = broadcaster.run().await.unwrap();

        assert_eq!(messenger.sent().len(), 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.sent, 2);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn test_broadcast_with_nobody_enabled() {
        let messenger = Arc::new(RecordingMessenger::new());
        let directory = Arc::new(MemoryDirectory::with_users(vec![User::new("1", 10, false)]));
        let broadcaster = Broadcaster::new(messenger.clone(), directory);

        let summary = broadcaster.run().await.unwrap();

        assert_eq!(summary, BroadcastSummary::default());
        assert!(messenger.sent().is_empty());
    }

    #[tokio::test]
    async fn test_broadcast_fails_when_directory_is_down() {
        let messenger = Arc::new(RecordingMessenger::new());
        let directory = Arc::new(MemoryDirectory::with_users(users()).failing_reads());
        let broadcaster = Broadcaster::new(messenger.clone(), directory);

        assert!(broadcaster.run().await.is_err());
        assert!(messenger.sent().is_empty());
    }

    #[test]
    fn test_summary_report() {
        let summary = BroadcastSummary {
            total: 4,
            sent: 3,
            failed: 1,
        };
        assert_eq!(
            summary.report(),
            "Lembrete de pedido enviado: 3 de 4 entregues (1 falhas)."
        );
    }
}
