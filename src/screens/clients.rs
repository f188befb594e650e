//! Client list/editor screen.

use crate::api::ApiClient;
use crate::models::{Client, ClientDraft, ClientType};

use super::{ListState, Outcome, Phase};

pub const CLIENTS_LOAD_FAILED: &str = "Could not load clients";
pub const CLIENT_SAVE_FAILED: &str = "Could not save client";
pub const CLIENT_DEACTIVATE_FAILED: &str = "Could not deactivate client";

#[derive(Debug, Default)]
pub struct ClientsScreen {
    state: ListState<Client>,
    filter: Option<ClientType>,
    /// Form being edited; an empty `id` means a new client
    pub draft: ClientDraft,
}

impl ClientsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clients(&self) -> &[Client] {
        self.state.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn filter(&self) -> Option<ClientType> {
        self.filter
    }

    /// Fetch the client list with the active filter.
    pub async fn load(&mut self, api: &ApiClient) -> Outcome {
        self.state.begin();
        let result = api.list_clients(self.filter).await;
        self.state.reconcile(result, CLIENTS_LOAD_FAILED)
    }

    /// Change the type filter and reload.
    pub async fn set_filter(&mut self, api: &ApiClient, filter: Option<ClientType>) -> Outcome {
        self.filter = filter;
        self.load(api).await
    }

    /// Start editing a listed client. Returns `false` when no such client is listed.
    pub fn edit(&mut self, id: &str) -> bool {
        match self.state.items().iter().find(|c| c.id.to_string() == id) {
            Some(client) => {
                self.draft = ClientDraft::from_client(client);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = ClientDraft::default();
    }

    /// Create or update from the draft, depending on whether it carries an id.
    ///
    /// The draft is reset and the list reloaded only on success.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        self.state.begin();

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.state.fail(&e, CLIENT_SAVE_FAILED),
        };
        let result = match self.draft.target_id() {
            Some(id) => api.update_client(id, &payload).await,
            None => api.create_client(&payload).await,
        };
        if let Err(e) = result {
            return self.state.fail(&e, CLIENT_SAVE_FAILED);
        }

        tracing::info!(id = ?self.draft.target_id(), "Client saved");
        self.draft = ClientDraft::default();
        self.load(api).await
    }

    /// Deactivate a client and reload on success.
    pub async fn deactivate(&mut self, api: &ApiClient, id: &str) -> Outcome {
        self.state.begin();
        if let Err(e) = api.deactivate_client(id).await {
            return self.state.fail(&e, CLIENT_DEACTIVATE_FAILED);
        }

        tracing::info!(id, "Client deactivated");
        self.load(api).await
    }
}
