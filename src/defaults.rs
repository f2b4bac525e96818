//! Default values applied before rendering
//!
//! Every function here returns a new value; caller data is never modified.

use crate::models::{Body, Content, Heading, MergedBody, Product};

/// Greeting used when the body does not set one
pub const DEFAULT_GREETING: &str = "Hi";

/// Signature used when the body does not set one
pub const DEFAULT_SIGNATURE: &str = "Yours truly";

/// Product name used when the branding does not set one
pub const DEFAULT_PRODUCT_NAME: &str = "Missive";

/// Copyright line used when the branding does not set one
pub const DEFAULT_COPYRIGHT: &str = "Copyright © Missive. All rights reserved.";

/// Hint shown below button actions, `{ACTION}` is the button label
pub const DEFAULT_TROUBLE_TEXT: &str =
    "If you’re having trouble with the button '{ACTION}', copy and paste the URL below into your web browser.";

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Build the working copy of a body
pub fn merge(body: &Body) -> MergedBody {
    let heading = if body.title.is_empty() {
        Heading::Greeting {
            greeting: or_default(&body.greeting, DEFAULT_GREETING),
            name: body.name.clone(),
        }
    } else {
        Heading::Title(body.title.clone())
    };

    let content = if body.free_markdown.trim().is_empty() {
        Content::Structured {
            dictionary: body.dictionary.clone(),
            table: (!body.table.is_empty()).then(|| body.table.clone()),
            actions: body.actions.clone(),
        }
    } else {
        Content::FreeForm {
            markdown: body.free_markdown.clone(),
        }
    };

    MergedBody {
        heading,
        intros: body.intros.clone(),
        content,
        outros: body.outros.clone(),
        signature: or_default(&body.signature, DEFAULT_SIGNATURE),
        qr_code: (!body.qr_code.is_empty()).then(|| body.qr_code.clone()),
        extra: body.extra.clone(),
    }
}

/// Build the working copy of the branding
pub fn merge_product(product: &Product) -> Product {
    Product {
        name: or_default(&product.name, DEFAULT_PRODUCT_NAME),
        link: product.link.clone(),
        logo: product.logo.clone(),
        copyright: or_default(&product.copyright, DEFAULT_COPYRIGHT),
        trouble_text: or_default(&product.trouble_text, DEFAULT_TROUBLE_TEXT),
    }
}
