//! The components shown by the app out of the box

use super::{Component, Dashboard, FormComponent};
use crate::state::forms::rules::{matches, number_between};
use crate::state::forms::{FieldSpec, Form, FormSchema};
use anyhow::Result;
use regex::Regex;

const USERNAME_PATTERN: &str = r"^[a-zA-Z0-9_]{3,20}$";
const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";

/// Registration form, survey, validated registration and the admin panel
pub fn default_components() -> Result<Vec<Component>> {
    Ok(vec![
        Component::form("Registration Form", registration_form()?),
        Component::form("Customer Survey", survey_form()?),
        Component::form("Enhanced Registration", enhanced_registration_form()?),
        Component::dashboard("Admin Dashboard", Dashboard::admin()).gated(["admin"]),
    ])
}

fn registration_form() -> Result<FormComponent> {
    let schema = FormSchema::new(vec![
        FieldSpec::text("username", "Username"),
        FieldSpec::text("email", "Email"),
        FieldSpec::number("age", "Age"),
        FieldSpec::select(
            "gender",
            "Gender",
            ["Male", "Female", "Other", "Prefer not to say"],
        ),
    ])?;
    Ok(FormComponent::new(Form::new(schema)?))
}

fn survey_form() -> Result<FormComponent> {
    let schema = FormSchema::new(vec![
        FieldSpec::select(
            "satisfaction",
            "Satisfaction Level",
            [
                "Very Satisfied",
                "Satisfied",
                "Neutral",
                "Dissatisfied",
                "Very Dissatisfied",
            ],
        ),
        FieldSpec::text("feedback", "Your Feedback"),
    ])?;
    Ok(FormComponent::new(Form::new(schema)?))
}

fn enhanced_registration_form() -> Result<FormComponent> {
    let schema = FormSchema::new(vec![
        FieldSpec::text("username", "Username")
            .with_help("Must be 3-20 characters, letters and numbers only"),
        FieldSpec::text("email", "Email").with_help("Must be a valid email address"),
        FieldSpec::number("age", "Age").with_help("Must be between 18 and 120"),
    ])?;

    let form = Form::new(schema)?
        .with_validation(
            "username",
            matches(Regex::new(USERNAME_PATTERN)?),
            "Username must be 3-20 characters (letters, numbers, underscores)",
        )?
        .with_validation(
            "email",
            matches(Regex::new(EMAIL_PATTERN)?),
            "Please enter a valid email address",
        )?
        .with_validation(
            "age",
            number_between(18.0, 120.0),
            "Age must be between 18 and 120",
        )?;

    Ok(FormComponent::new(form).with_description("Please fill out all fields carefully."))
}
