use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use axum_extra::extract::Form;

use crate::{
    form::{FormFields, FormState},
    transaction::{
        TransactionId, form_page::TransactionFormState, submit::submit_transaction_form,
    },
    view::{RedirectQuery, redirect_target},
};

/// A route handler for replacing the fields of a transaction, redirects to
/// `redirect_url` on success.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionFormState>,
    Path(transaction_id): Path<TransactionId>,
    Query(query_params): Query<RedirectQuery>,
    Form(fields): Form<FormFields>,
) -> Response {
    let form = FormState::Open {
        editing: Some(transaction_id),
        fields,
        errors: Default::default(),
    };

    submit_transaction_form(
        &state.store,
        form,
        &redirect_target(query_params.redirect_url),
    )
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
    };
    use axum_extra::extract::Form;
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        form::FormFields,
        store::TransactionStore,
        test_utils::assert_hx_redirect,
        transaction::{
            Transaction, TransactionId, TransactionType, edit_endpoint::edit_transaction_endpoint,
            form_page::TransactionFormState,
        },
        view::RedirectQuery,
    };

    fn state_with_salary() -> (TransactionFormState, Transaction) {
        let mut store = TransactionStore::new();
        let salary = store.add(Transaction::build(
            TransactionType::Income,
            Decimal::from(3000),
            "Salary",
            "Monthly salary",
            date!(2024 - 09 - 01),
        ));
        let state = TransactionFormState {
            store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        };

        (state, salary)
    }

    #[tokio::test]
    async fn can_update_transaction() {
        let (state, salary) = state_with_salary();
        let form = FormFields {
            type_: TransactionType::Income,
            amount: "3200".to_owned(),
            category: "Business".to_owned(),
            description: "Consulting".to_owned(),
            date: "2024-09-02".to_owned(),
        };
        let redirect_url = "/analytics?month=2024-09&category=all".to_owned();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(salary.id),
            Query(RedirectQuery {
                redirect_url: Some(redirect_url.clone()),
            }),
            Form(form),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, &redirect_url);

        let want = Transaction {
            id: salary.id,
            type_: TransactionType::Income,
            amount: Decimal::from(3200),
            category: "Business".to_owned(),
            description: "Consulting".to_owned(),
            date: date!(2024 - 09 - 02),
        };
        let store = state.store.lock().unwrap();
        assert_eq!(store.all(), &[want]);
    }

    #[tokio::test]
    async fn invalid_update_leaves_transaction_unchanged() {
        let (state, salary) = state_with_salary();
        let form = FormFields {
            amount: "-1".to_owned(),
            ..FormFields::from_transaction(&salary)
        };

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(salary.id),
            Query(RedirectQuery::default()),
            Form(form),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(state.store.lock().unwrap().all(), &[salary]);
    }

    #[tokio::test]
    async fn updating_missing_transaction_is_not_found() {
        let (state, salary) = state_with_salary();

        let response = edit_transaction_endpoint(
            State(state.clone()),
            Path(TransactionId::new(2)),
            Query(RedirectQuery::default()),
            Form(FormFields::from_transaction(&salary)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.store.lock().unwrap().len(), 1);
    }
}
