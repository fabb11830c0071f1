use maud::{Markup, html};

use crate::{
    category::categories_for,
    endpoints::{self, format_endpoint},
    form::{Field, FieldError, FormFields, FormState, ValidationErrors},
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_ERROR_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
    transaction::{TransactionId, TransactionType},
    view::with_redirect,
};

/// The ID of the element wrapping the category select, replaced whenever the
/// transaction type changes.
pub const CATEGORY_FIELD_ID: &str = "category-field";

/// Renders the add/edit form as a modal dialog.
///
/// A closed form renders as nothing, which empties `#modal-container`.
/// After the form is saved the client is sent to `redirect_url`.
pub fn transaction_form_view(form: &FormState, redirect_url: &str) -> Markup {
    let FormState::Open {
        editing,
        fields,
        errors,
    } = form
    else {
        return html! {};
    };

    html! {
        div
            id="transaction-modal"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4"
        {
            div class={ (CARD_STYLE) " max-w-md text-gray-900 dark:text-white" }
            {
                (form_element(*editing, fields, errors, redirect_url))
            }
        }
    }
}

fn form_element(
    editing: Option<TransactionId>,
    fields: &FormFields,
    errors: &ValidationErrors,
    redirect_url: &str,
) -> Markup {
    let (heading, submit_text) = match editing {
        Some(_) => ("Edit Transaction", "Update Transaction"),
        None => ("Add Transaction", "Add Transaction"),
    };
    let create_url = editing
        .is_none()
        .then(|| with_redirect(endpoints::TRANSACTIONS_API, redirect_url));
    let update_url = editing.map(|id| {
        with_redirect(&format_endpoint(endpoints::TRANSACTION, id), redirect_url)
    });
    let spinner = loading_spinner();

    html! {
        form
            hx-post=[create_url]
            hx-put=[update_url]
            hx-target="#modal-container"
            hx-target-422="#modal-container"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            h2 class="text-xl font-bold" { (heading) }

            div
            {
                label for="transaction-type" class=(FORM_LABEL_STYLE) { "Type" }

                select
                    name="type_"
                    id="transaction-type"
                    hx-get=(endpoints::CATEGORIES_API)
                    hx-include="closest form"
                    hx-trigger="change"
                    hx-target={ "#" (CATEGORY_FIELD_ID) }
                    hx-swap="outerHTML"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for type_ in [TransactionType::Expense, TransactionType::Income] {
                        option value=(type_) selected[fields.type_ == type_]
                        {
                            @match type_ {
                                TransactionType::Expense => "Expense",
                                TransactionType::Income => "Income",
                            }
                        }
                    }
                }
            }

            div
            {
                label for="transaction-amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="transaction-amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    required
                    value=(fields.amount)
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(errors.get(Field::Amount)))
            }

            (category_field(fields.type_, &fields.category, errors.get(Field::Category)))

            div
            {
                label for="transaction-description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    name="description"
                    id="transaction-description"
                    type="text"
                    placeholder="Enter description"
                    required
                    value=(fields.description)
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(errors.get(Field::Description)))
            }

            div
            {
                label for="transaction-date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="transaction-date"
                    type="date"
                    required
                    value=(fields.date)
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(errors.get(Field::Date)))
            }

            div class="flex gap-4 pt-2"
            {
                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    (submit_text)
                }

                button
                    type="button"
                    id="cancel-button"
                    onclick="document.getElementById('modal-container').replaceChildren()"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Cancel"
                }
            }
        }
    }
}

/// Renders the category select for `type_` with `selected` chosen.
///
/// A category outside of the vocabulary for `type_` is kept as an extra
/// option so that editing does not silently change it.
pub fn category_field(type_: TransactionType, selected: &str, error: Option<FieldError>) -> Markup {
    let categories = categories_for(type_);
    let unlisted = (!selected.is_empty() && !categories.contains(&selected)).then_some(selected);

    html! {
        div id=(CATEGORY_FIELD_ID)
        {
            label for="transaction-category" class=(FORM_LABEL_STYLE) { "Category" }

            select
                name="category"
                id="transaction-category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[selected.is_empty()] { "Select category" }

                @for category in categories.iter().copied().chain(unlisted) {
                    option value=(category) selected[category == selected] { (category) }
                }
            }

            (field_error(error))
        }
    }
}

fn field_error(error: Option<FieldError>) -> Markup {
    html! {
        @if let Some(error) = error {
            p class=(FORM_ERROR_STYLE) { (error) }
        }
    }
}
