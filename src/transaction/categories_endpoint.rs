//! Defines the endpoint that swaps the category options when the transaction type changes.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    form::{FormFields, FormState},
    transaction::form::category_field,
};

/// Renders the category select for the type chosen in the open form.
///
/// The whole form is sent along with the new type, and the type change goes
/// through [FormState::change_type] so the chosen category is cleared.
pub async fn get_category_options(Query(fields): Query<FormFields>) -> Response {
    let type_ = fields.type_;
    let mut form = FormState::Open {
        editing: None,
        fields,
        errors: Default::default(),
    };
    form.change_type(type_);

    let FormState::Open { fields, .. } = &form else {
        return html! {}.into_response();
    };

    category_field(fields.type_, &fields.category, None).into_response()
}
