//! Values exposed to theme skeletons
//!
//! The same context feeds both passes. Empty optional parts serialize as
//! `null` so skeletons can test them with sections.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::button::{button_width, DEFAULT_BUTTON_COLOR, DEFAULT_BUTTON_TEXT_COLOR};
use crate::error::Result;
use crate::markup::Fragments;
use crate::models::{
    Action, CallToAction, Content, Entry, MergedBody, Product, Table, TextDirection,
};
use crate::table;

#[derive(Debug, Serialize)]
pub(super) struct Context<'a> {
    product: ProductView<'a>,
    text_direction: &'static str,
    body: BodyView<'a>,
}

#[derive(Debug, Serialize)]
struct ProductView<'a> {
    name: &'a str,
    link: &'a str,
    logo: &'a str,
    copyright: &'a str,
}

#[derive(Debug, Serialize)]
struct BodyView<'a> {
    title: Option<&'a str>,
    salutation: Option<String>,
    intros: &'a [String],
    outros: &'a [String],
    signature: &'a str,
    qr_code: Option<&'a str>,
    structured: Option<StructuredView<'a>>,
    free_form: Option<FreeFormView<'a>>,
    extra: &'a BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct StructuredView<'a> {
    dictionary: Option<DictionaryView<'a>>,
    table: Option<TableView<'a>>,
    actions: Vec<ActionView<'a>>,
}

#[derive(Debug, Serialize)]
struct DictionaryView<'a> {
    entries: &'a [Entry],
}

#[derive(Debug, Serialize)]
struct TableView<'a> {
    columns: Vec<ColumnView<'a>>,
    rows: Vec<Vec<CellView<'a>>>,
    /// Box-drawn rendering for plaintext skeletons
    text: String,
}

#[derive(Debug, Serialize)]
struct ColumnView<'a> {
    label: &'a str,
    width: Option<&'a str>,
    align: &'static str,
}

#[derive(Debug, Serialize)]
struct CellView<'a> {
    value: &'a str,
    width: Option<&'a str>,
    align: &'static str,
}

#[derive(Debug, Serialize)]
struct ActionView<'a> {
    instructions: &'a str,
    invite_code: Option<&'a str>,
    button: Option<ButtonView<'a>>,
}

#[derive(Debug, Serialize)]
struct ButtonView<'a> {
    text: &'a str,
    link: &'a str,
    color: &'a str,
    text_color: &'a str,
    width: u32,
    trouble: String,
}

#[derive(Debug, Serialize)]
struct FreeFormView<'a> {
    html: &'a str,
    text: &'a str,
}

impl<'a> Context<'a> {
    /// Build the context of one render call
    ///
    /// `free_form` must hold the converted markdown when `body` is in
    /// free-form mode.
    pub(super) fn new(
        product: &'a Product,
        text_direction: TextDirection,
        body: &'a MergedBody,
        free_form: Option<&'a Fragments>,
        wrap_width: usize,
    ) -> Result<Self> {
        let (structured, free_form) = match &body.content {
            Content::Structured {
                dictionary,
                table,
                actions,
            } => {
                let structured = StructuredView {
                    dictionary: (!dictionary.is_empty())
                        .then_some(DictionaryView { entries: dictionary }),
                    table: table
                        .as_ref()
                        .map(|t| table_view(t, wrap_width))
                        .transpose()?,
                    actions: actions
                        .iter()
                        .map(|a| action_view(a, &product.trouble_text))
                        .collect(),
                };
                (Some(structured), None)
            }
            Content::FreeForm { .. } => {
                let view = free_form.map(|f| FreeFormView {
                    html: &f.html,
                    text: &f.plain_text,
                });
                (None, view)
            }
        };

        Ok(Self {
            product: ProductView {
                name: &product.name,
                link: &product.link,
                logo: &product.logo,
                copyright: &product.copyright,
            },
            text_direction: text_direction.as_str(),
            body: BodyView {
                title: body.heading.title(),
                salutation: body.heading.salutation(),
                intros: &body.intros,
                outros: &body.outros,
                signature: &body.signature,
                qr_code: body.qr_code.as_deref(),
                structured,
                free_form,
                extra: &body.extra,
            },
        })
    }

    pub(super) fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn table_view(table: &Table, wrap_width: usize) -> Result<TableView<'_>> {
    // Validates the row keys before anything is exposed
    let text = table::format_table(table, wrap_width)?.join("\n");

    let columns = table
        .keys()
        .into_iter()
        .map(|key| ColumnView {
            label: key,
            width: table.columns.width(key),
            align: table.columns.alignment(key).as_str(),
        })
        .collect();

    let rows = table
        .data
        .iter()
        .map(|row| {
            row.iter()
                .map(|entry| CellView {
                    value: &entry.value,
                    width: table.columns.width(&entry.key),
                    align: table.columns.alignment(&entry.key).as_str(),
                })
                .collect()
        })
        .collect();

    Ok(TableView {
        columns,
        rows,
        text,
    })
}

fn action_view<'a>(action: &'a Action, trouble_text: &str) -> ActionView<'a> {
    let (invite_code, button) = match action.call_to_action() {
        Some(CallToAction::InviteCode(code)) => (Some(code), None),
        Some(CallToAction::Button(button)) => {
            let view = ButtonView {
                text: &button.text,
                link: &button.link,
                color: non_empty_or(&button.color, DEFAULT_BUTTON_COLOR),
                text_color: non_empty_or(&button.text_color, DEFAULT_BUTTON_TEXT_COLOR),
                width: button_width(&button.text),
                trouble: trouble_text.replace("{ACTION}", &button.text),
            };
            (None, Some(view))
        }
        None => (None, None),
    };

    ActionView {
        instructions: &action.instructions,
        invite_code,
        button,
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
