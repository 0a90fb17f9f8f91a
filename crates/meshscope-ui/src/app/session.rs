//! Session thunks: async calls against the API that report back through the store.
//!
//! # Design
//! - Each thunk spawns, awaits the client, then applies one reducer.
//! - Authenticate attempts carry a request id; the store drops stale results.
//! - `StoreSession` adapts these thunks to the login controller's dispatch trait.

use crate::core::store::{
    AppStore, CredentialsCheck, apply_credentials_check, begin_authenticate,
    begin_credentials_check, begin_post_login, finish_authenticate, finish_post_login, logout,
};
use crate::features::login::controller::SessionDispatch;
use crate::services::api::ApiClient;
use anyhow::Context;
use chrono::Utc;
use gloo::console;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

pub(crate) fn check_credentials(dispatch: Dispatch<AppStore>, client: Rc<ApiClient>) {
    let since = begin_credentials_check(&dispatch.get().session);
    yew::platform::spawn_local(async move {
        let check = match client.check_credentials().await {
            Ok(Some(session)) => CredentialsCheck::Session(session),
            Ok(None) => CredentialsCheck::NoSession,
            Err(err) => CredentialsCheck::Failed(err.to_string()),
        };
        let mut applied = true;
        dispatch.reduce_mut(|store| {
            applied = apply_credentials_check(&mut store.session, since, check, Utc::now());
        });
        if !applied {
            console::log!("discarded credentials check superseded by login");
        }
    });
}

pub(crate) fn authenticate(
    dispatch: Dispatch<AppStore>,
    client: Rc<ApiClient>,
    username: String,
    password: String,
) {
    let mut request = None;
    dispatch.reduce_mut(|store| request = Some(begin_authenticate(&mut store.session)));
    let Some(request) = request else {
        return;
    };
    yew::platform::spawn_local(async move {
        let result = client
            .authenticate(&username, &password)
            .await
            .map_err(|err| err.to_string());
        let succeeded = result.is_ok();
        let mut applied = false;
        dispatch.reduce_mut(|store| {
            applied = finish_authenticate(&mut store.session, request, result);
        });
        if !applied {
            console::log!("discarded stale login response");
            return;
        }
        if succeeded {
            load_post_login(dispatch, client).await;
        }
    });
}

async fn load_post_login(dispatch: Dispatch<AppStore>, client: Rc<ApiClient>) {
    dispatch.reduce_mut(|store| begin_post_login(&mut store.session));
    let error = match client.fetch_status().await.context("loading server status") {
        Ok(status) => {
            for warning in &status.warning_messages {
                console::log!("server warning", warning.as_str());
            }
            None
        }
        Err(err) => Some(format!("{err:#}")),
    };
    dispatch.reduce_mut(|store| finish_post_login(&mut store.session, error));
}

pub(crate) fn logout_session(dispatch: Dispatch<AppStore>, client: Rc<ApiClient>) {
    yew::platform::spawn_local(async move {
        if let Err(err) = client.logout().await {
            console::error!("logout request failed", err.to_string());
        }
        dispatch.reduce_mut(|store| logout(&mut store.session));
    });
}

/// Session dispatch handle backed by the app store and API client.
#[derive(Clone)]
pub(crate) struct StoreSession {
    pub dispatch: Dispatch<AppStore>,
    pub client: Rc<ApiClient>,
}

impl SessionDispatch for StoreSession {
    fn check_credentials(&self) {
        check_credentials(self.dispatch.clone(), Rc::clone(&self.client));
    }

    fn authenticate(&self, username: &str, password: &str) {
        authenticate(
            self.dispatch.clone(),
            Rc::clone(&self.client),
            username.to_string(),
            password.to_string(),
        );
    }
}
