use serde::{Deserialize, Serialize};

use crate::tables;

/// Lead-capture form submission as posted by the browser.
///
/// Every field is optional at the deserialization layer; required-field
/// enforcement is a handler concern so that an incomplete POST gets the
/// documented redirect instead of a deserializer rejection. The three
/// renamed fields carry Salesforce custom-field IDs on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadSubmission {
    /// Lead's full name (required).
    pub full_name: Option<String>,
    /// Contact phone number (required).
    pub mobile: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Company or clinic name.
    pub company: Option<String>,
    /// Free-form note from the lead.
    pub description: Option<String>,
    /// Product the lead is interested in.
    #[serde(rename = "00N0o00000M9Lpq")]
    pub product_interest: Option<String>,
    /// Facebook profile URL.
    #[serde(rename = "00NBV000000Piur")]
    pub facebook: Option<String>,
    /// Lead's website.
    pub url: Option<String>,
    /// Salesman the lead is assigned to.
    #[serde(rename = "00NBV000000VDf4")]
    pub salesman: Option<String>,
    /// Acquisition channel.
    pub lead_source: Option<String>,
}

impl LeadSubmission {
    /// True when both required fields are present and non-empty.
    ///
    /// No trimming: a whitespace-only `full_name` passes this gate and is
    /// rejected later by name derivation.
    pub fn has_required_fields(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        filled(&self.full_name) && filled(&self.mobile)
    }
}

/// First/last name pair derived from a submitted full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
}

impl ParsedName {
    /// Splits a full name on Unicode whitespace. The last token becomes the
    /// last name; the tokens before it, rejoined with single spaces, become
    /// the first name (empty for single-token names).
    ///
    /// Returns `None` when the input has no tokens at all.
    pub fn derive(full_name: &str) -> Option<Self> {
        let mut parts: Vec<&str> = full_name.split_whitespace().collect();
        let last_name = parts.pop()?.to_string();
        let first_name = parts.join(" ");

        Some(Self {
            first_name,
            last_name,
        })
    }
}

/// Form-encoded record POSTed to the CRM web-to-lead endpoint.
///
/// Serialization order is the wire order. `None` fields are omitted from the
/// body entirely; present-but-empty values are sent as empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct CrmRecord {
    /// CRM organization identifier.
    pub oid: String,
    /// Derived first name (may be empty for single-token names).
    pub first_name: String,
    /// Derived last name.
    pub last_name: String,
    /// Contact phone number.
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Product interest, raw as submitted. Hashtag translation is a
    /// notification-only concern.
    #[serde(rename = "00N0o00000M9Lpq", skip_serializing_if = "Option::is_none")]
    pub product_interest: Option<String>,
    #[serde(rename = "00NBV000000Piur", skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "00NBV000000VDf4", skip_serializing_if = "Option::is_none")]
    pub salesman: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_source: Option<String>,
}

impl CrmRecord {
    /// Builds the CRM record from a validated submission and derived name.
    pub fn build(
        org_id: &str,
        name: &ParsedName,
        mobile: &str,
        submission: &LeadSubmission,
    ) -> Self {
        Self {
            oid: org_id.to_string(),
            first_name: name.first_name.clone(),
            last_name: name.last_name.clone(),
            mobile: mobile.to_string(),
            email: submission.email.clone(),
            company: submission.company.clone(),
            description: submission.description.clone(),
            product_interest: submission.product_interest.clone(),
            facebook: submission.facebook.clone(),
            url: submission.url.clone(),
            salesman: submission.salesman.clone(),
            lead_source: submission.lead_source.clone(),
        }
    }
}

/// Telegram notification content: label/value lines in fixed display order.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    fields: Vec<(&'static str, String)>,
}

impl NotificationMessage {
    /// Collects the non-empty submission fields in notification order.
    ///
    /// The full name is reported verbatim (not split) and the product value
    /// is hashtag-translated; fields that are absent or empty are dropped.
    /// The "Công ty" and "Salesman" labels are fixed here; the rest come
    /// from the display-label table.
    pub fn from_submission(submission: &LeadSubmission) -> Self {
        let product = submission
            .product_interest
            .as_deref()
            .map(|raw| tables::product_display(raw).to_string());

        let ordered = [
            (
                tables::display_label("full_name"),
                submission.full_name.clone(),
            ),
            (tables::display_label("mobile"), submission.mobile.clone()),
            (tables::display_label("email"), submission.email.clone()),
            ("Công ty", submission.company.clone()),
            ("Salesman", submission.salesman.clone()),
            (
                tables::display_label(tables::FIELD_PRODUCT_INTEREST),
                product,
            ),
            (
                tables::display_label("description"),
                submission.description.clone(),
            ),
            (
                tables::display_label(tables::FIELD_FACEBOOK),
                submission.facebook.clone(),
            ),
            (tables::display_label("url"), submission.url.clone()),
            (
                tables::display_label("lead_source"),
                submission.lead_source.clone(),
            ),
        ];

        let fields = ordered
            .into_iter()
            .filter_map(|(label, value)| match value {
                Some(v) if !v.is_empty() => Some((label, v)),
                _ => None,
            })
            .collect();

        Self { fields }
    }

    /// Renders the HTML message body sent to Telegram.
    pub fn render(&self) -> String {
        let mut message = String::from("<b>Thông tin Lead mới #PUSHLEAD:</b>\n\n");

        for (label, value) in &self.fields {
            message.push_str(&format!("<b>{}:</b> {}\n", label, value));
        }

        message
    }

    /// Label/value pairs in display order, empties already dropped.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }
}
