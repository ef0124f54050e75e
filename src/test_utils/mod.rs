#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod stub_backend;

pub(crate) use form::{
    assert_form_error_message, assert_form_input, assert_form_submit_button, assert_hx_endpoint,
    must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_hx_redirect};

use crate::{AppState, api::Backend};

/// An [AppState] whose backend points nowhere, for handlers that never use
/// it.
pub(crate) fn get_test_app_state() -> AppState {
    let backend = Backend::new("http://127.0.0.1:9".parse().unwrap())
        .expect("Could not create backend client");

    AppState::new(backend, "foobar")
}
