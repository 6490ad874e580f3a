//! Plain-text rendering of the storefront page.

use std::fmt::{self, Write};

use catalog_core::{
    category_counts, derive::total_count, featured_for_display, filtered_products,
    present::{
        all_filter_label, category_filter_label, category_icon, contact_link, format_price,
        result_count_label, selection_title, view_status, ViewStatus, EMPTY_CATEGORY_MESSAGE,
        LOADING_MESSAGE, LOAD_FAILED_MESSAGE,
    },
    resolve_display_image, CatalogState, Selection,
};
use shared::domain::{ContactInfo, Product};

const STORE_NAME: &str = "Araz Elektron";
const STORE_TAGLINE: &str = "Keyfiyyətli elektron avadanlıqlar";

pub fn render_page(state: &CatalogState, selection: &Selection, featured_limit: usize) -> String {
    let mut out = String::new();
    let _ = write_page(&mut out, state, selection, featured_limit);
    out
}

fn write_page(
    out: &mut String,
    state: &CatalogState,
    selection: &Selection,
    featured_limit: usize,
) -> fmt::Result {
    writeln!(out, "{STORE_NAME} - {STORE_TAGLINE}")?;

    match view_status(state) {
        ViewStatus::Loading => return writeln!(out, "{LOADING_MESSAGE}"),
        ViewStatus::Degraded { error } => {
            match error {
                Some(err) => writeln!(out, "! {LOAD_FAILED_MESSAGE}: {err}")?,
                None => writeln!(out, "! {LOAD_FAILED_MESSAGE}")?,
            }
        }
        ViewStatus::NotLoaded | ViewStatus::Ready => {}
    }

    let featured = featured_for_display(state, featured_limit);
    if !featured.is_empty() {
        writeln!(out, "\n⭐ Xüsusi Məhsullar")?;
        for product in featured {
            write_product(out, product)?;
        }
    }

    writeln!(out, "\n📦 Məhsul Kateqoriyaları")?;
    writeln!(out, "  {}", all_filter_label(total_count(state)))?;
    for (index, entry) in category_counts(state).iter().enumerate() {
        writeln!(
            out,
            "  {} {}",
            category_icon(index),
            category_filter_label(&entry.name, entry.count)
        )?;
    }

    let products = filtered_products(state, selection);
    writeln!(out, "\n{}", selection_title(selection))?;
    writeln!(out, "{}", result_count_label(products.len()))?;
    if products.is_empty() {
        writeln!(out, "  {EMPTY_CATEGORY_MESSAGE}")?;
    }
    for product in products {
        write_product(out, product)?;
    }

    if let Some(contact) = &state.contact {
        write_contact(out, contact)?;
    }
    Ok(())
}

fn write_product(out: &mut String, product: &Product) -> fmt::Result {
    writeln!(
        out,
        "  [{}] {} - {}",
        product.category,
        product.name,
        format_price(product.price)
    )?;
    if !product.description.is_empty() {
        writeln!(out, "      {}", product.description)?;
    }
    writeln!(out, "      {}", resolve_display_image(product))
}

fn write_contact(out: &mut String, contact: &ContactInfo) -> fmt::Result {
    writeln!(out, "\n📞 Bizimlə Əlaqə")?;
    for (key, entries) in contact.contact_groups.iter() {
        if entries.is_empty() {
            continue;
        }
        writeln!(out, "  {}", key.title())?;
        for entry in entries {
            writeln!(
                out,
                "    {} {} <{}>",
                entry.name,
                entry.phone,
                contact_link(key, entry)
            )?;
        }
    }
    for line in &contact.address_lines {
        writeln!(out, "  📍 {line}")?;
    }
    if !contact.work_hours.is_empty() {
        writeln!(out, "  🕒 {}", contact.work_hours)?;
    }
    if !contact.company_description.is_empty() {
        writeln!(out, "  {}", contact.company_description)?;
    }
    Ok(())
}
