use std::collections::HashSet;
use crate::viewhub::structs::hub_state::HubState;

pub const ALL_VIEWS: &str = "*";

impl HubState {
    pub fn subscribe(&mut self, view_name: &str, session_id: &str) -> bool {
        self.subscriptions.entry(view_name.to_string()).or_default().insert(session_id.to_string())
    }

    /// Removes `session_id` from `view_name`, or from every view when given `*`.
    pub fn unsubscribe(&mut self, view_name: &str, session_id: &str) -> usize {
        let mut removed = 0;
        self.subscriptions.retain(|view, sessions| {
            if (view_name == ALL_VIEWS || view == view_name) && sessions.remove(session_id) {
                removed += 1;
            }
            !sessions.is_empty()
        });
        removed
    }

    /// Sessions bound to `connection_id` and to no other open connection.
    pub fn exclusive_sessions(&self, connection_id: u64) -> HashSet<String> {
        let Some(connection) = self.connections.get(&connection_id) else {
            return HashSet::new();
        };
        connection.session_ids.iter()
            .filter(|sid| !self.connections.iter()
                .any(|(id, other)| *id != connection_id && other.session_ids.contains(*sid)))
            .cloned()
            .collect()
    }
}
