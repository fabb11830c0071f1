//! The add/edit transaction form: its raw field buffer, validation and the
//! open/closed state machine.
//!
//! Handlers deserialize a [FormFields] from the request, wrap it in a
//! [FormState::Open] and call [FormState::submit]. Rejected submissions keep
//! the form open with a [ValidationErrors] value that is rendered next to the
//! offending inputs.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    Error,
    store::TransactionStore,
    transaction::{Transaction, TransactionBuilder, TransactionId, TransactionType},
};

/// The text the user entered into the transaction form.
///
/// Every field except `type_` is kept as entered so that an invalid form can
/// be shown again without losing the user's input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FormFields {
    /// Income or expense.
    #[serde(default)]
    pub type_: TransactionType,
    /// The amount as typed, e.g. "45.99".
    #[serde(default)]
    pub amount: String,
    /// The chosen category, empty if none was chosen.
    #[serde(default)]
    pub category: String,
    /// Free text describing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

impl FormFields {
    /// The fields of a blank form: an expense dated `today` with every text
    /// field empty.
    pub fn defaults(today: Date) -> Self {
        Self {
            type_: TransactionType::Expense,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: today.to_string(),
        }
    }

    /// The fields of `transaction`, for editing it.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            type_: transaction.type_,
            amount: format!("{:.2}", transaction.amount),
            category: transaction.category.clone(),
            description: transaction.description.clone(),
            date: transaction.date.to_string(),
        }
    }

    /// Set the transaction type.
    ///
    /// The category is cleared since each type has its own categories.
    pub fn set_type(&mut self, type_: TransactionType) {
        self.type_ = type_;
        self.category.clear();
    }

    /// Check every field and convert the form into a transaction.
    ///
    /// # Errors
    /// Returns one [FieldError] for each field that is missing or cannot be
    /// parsed. Text fields that only contain whitespace count as missing.
    pub fn validate(&self) -> Result<TransactionBuilder, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let amount = match parse_amount(&self.amount) {
            Ok(amount) => Some(amount),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let category = self.category.trim();
        if category.is_empty() {
            errors.push(FieldError::MissingCategory);
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.push(FieldError::MissingDescription);
        }

        let date = Date::parse(
            self.date.trim(),
            format_description!("[year]-[month]-[day]"),
        )
        .inspect_err(|error| tracing::debug!("could not parse date {:?}: {error}", self.date))
        .map_err(|_| FieldError::InvalidDate);
        let date = match date {
            Ok(date) => Some(date),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => Ok(Transaction::build(
                self.type_,
                amount,
                category,
                description,
                date,
            )),
            _ => Err(errors),
        }
    }
}

/// The largest amount a single transaction may have.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

fn parse_amount(text: &str) -> Result<Decimal, FieldError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(FieldError::MissingAmount);
    }

    let amount = Decimal::from_str(text).map_err(|_| FieldError::InvalidAmount)?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FieldError::NegativeAmount);
    }

    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(FieldError::AmountTooLarge);
    }

    // The edit form shows amounts with two decimal places.
    if amount.normalize().scale() > 2 {
        return Err(FieldError::TooManyDecimalPlaces);
    }

    Ok(amount)
}

/// The form inputs that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Amount,
    Category,
    Description,
    Date,
}

/// Why a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The amount was left blank.
    #[error("Enter an amount.")]
    MissingAmount,
    /// The amount is not a decimal number.
    #[error("Amount must be a number, e.g. 45.99.")]
    InvalidAmount,
    /// The amount is below zero.
    #[error("Amount cannot be negative.")]
    NegativeAmount,
    /// The amount is above [MAX_AMOUNT].
    #[error("Amount cannot be more than 1000000000000.")]
    AmountTooLarge,
    /// The amount has fractions of a paisa.
    #[error("Amount can have at most two decimal places.")]
    TooManyDecimalPlaces,
    /// No category was chosen.
    #[error("Choose a category.")]
    MissingCategory,
    /// The description was left blank.
    #[error("Enter a description.")]
    MissingDescription,
    /// The date is missing or not in the form `YYYY-MM-DD`.
    #[error("Enter a valid date.")]
    InvalidDate,
}

impl FieldError {
    /// The input this error belongs to.
    pub fn field(self) -> Field {
        match self {
            FieldError::MissingAmount
            | FieldError::InvalidAmount
            | FieldError::NegativeAmount
            | FieldError::AmountTooLarge
            | FieldError::TooManyDecimalPlaces => Field::Amount,
            FieldError::MissingCategory => Field::Category,
            FieldError::MissingDescription => Field::Description,
            FieldError::InvalidDate => Field::Date,
        }
    }
}

/// Every field error found in a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Whether the form passed validation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The error for `field`, if any.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.iter().copied().find(|error| error.field() == field)
    }

    /// The errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join(" "))
    }
}

/// The state of the transaction form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    /// No form is shown.
    #[default]
    Closed,
    /// The form is shown for adding (`editing` is `None`) or editing a
    /// transaction.
    Open {
        /// The transaction being edited.
        editing: Option<TransactionId>,
        /// The current field values.
        fields: FormFields,
        /// The problems found on the last submission.
        errors: ValidationErrors,
    },
}

/// The result of [FormState::submit].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new transaction was added to the store.
    Created(Transaction),
    /// An existing transaction was replaced.
    Updated(Transaction),
    /// The form was invalid or closed. The store was not changed.
    Rejected,
}

impl FormState {
    /// Open a blank form for adding a transaction.
    pub fn open_for_create(today: Date) -> Self {
        FormState::Open {
            editing: None,
            fields: FormFields::defaults(today),
            errors: ValidationErrors::default(),
        }
    }

    /// Open the form filled in with the fields of `transaction`.
    pub fn open_for_edit(transaction: &Transaction) -> Self {
        FormState::Open {
            editing: Some(transaction.id),
            fields: FormFields::from_transaction(transaction),
            errors: ValidationErrors::default(),
        }
    }

    /// Change the transaction type of an open form, clearing its category.
    pub fn change_type(&mut self, type_: TransactionType) {
        if let FormState::Open { fields, .. } = self {
            fields.set_type(type_);
        }
    }

    /// Close the form, dropping whatever was entered.
    ///
    /// Called once a submission is saved. The Cancel button closes the modal
    /// in the browser without a request.
    pub fn close(&mut self) {
        *self = FormState::Closed;
    }

    /// Validate the form and write it to `store`.
    ///
    /// On success the form is closed. If the form is invalid it stays open
    /// with the errors attached and `store` is left untouched.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingTransaction] if the transaction being
    /// edited is no longer in the store. The form stays open.
    pub fn submit(&mut self, store: &mut TransactionStore) -> Result<SubmitOutcome, Error> {
        let FormState::Open {
            editing,
            fields,
            errors,
        } = self
        else {
            tracing::warn!("tried to submit a closed transaction form");
            return Ok(SubmitOutcome::Rejected);
        };

        let builder = match fields.validate() {
            Ok(builder) => builder,
            Err(validation_errors) => {
                tracing::warn!("rejected transaction form: {validation_errors}");
                *errors = validation_errors;
                return Ok(SubmitOutcome::Rejected);
            }
        };

        let outcome = match *editing {
            Some(id) => {
                let transaction = store.update(id, builder)?;
                tracing::info!("updated transaction {}", transaction.id);
                SubmitOutcome::Updated(transaction)
            }
            None => {
                let transaction = store.add(builder);
                tracing::info!("created transaction {}", transaction.id);
                SubmitOutcome::Created(transaction)
            }
        };

        self.close();

        Ok(outcome)
    }
}
