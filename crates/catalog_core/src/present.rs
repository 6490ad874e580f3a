use shared::{
    domain::{ContactEntry, ContactGroupKey},
    error::CatalogError,
};

use crate::{
    derive::Selection,
    state::{CatalogState, LoadStatus},
};

pub const LOADING_MESSAGE: &str = "Yüklənir...";
pub const ALL_PRODUCTS_TITLE: &str = "Bütün Məhsullar";
pub const EMPTY_CATEGORY_MESSAGE: &str = "Bu kateqoriyada məhsul tapılmadı";
pub const LOAD_FAILED_MESSAGE: &str = "Məlumat yükləmə xətası";
pub const CURRENCY_SYMBOL: &str = "₼";

const CATEGORY_ICONS: [&str; 7] = ["📷", "💻", "🔊", "❄️", "💻", "🖥️", "🔌"];

pub fn format_price(price: f64) -> String {
    format!("{price:.2} {CURRENCY_SYMBOL}")
}

pub fn selection_title(selection: &Selection) -> &str {
    match selection {
        Selection::All => ALL_PRODUCTS_TITLE,
        Selection::Category(name) => name,
    }
}

pub fn result_count_label(count: usize) -> String {
    format!("{count} məhsul tapıldı")
}

pub fn all_filter_label(total: usize) -> String {
    format!("Hamısı ({total})")
}

pub fn category_filter_label(name: &str, count: usize) -> String {
    format!("{name} ({count})")
}

pub fn category_icon(index: usize) -> &'static str {
    CATEGORY_ICONS[index % CATEGORY_ICONS.len()]
}

pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// WhatsApp entries open a chat; every other group dials the number.
pub fn contact_link(key: ContactGroupKey, entry: &ContactEntry) -> String {
    let digits = phone_digits(&entry.phone);
    match key {
        ContactGroupKey::Whatsapp => format!("https://wa.me/{digits}"),
        ContactGroupKey::Ustalar | ContactGroupKey::Satis => format!("tel:{digits}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus<'a> {
    NotLoaded,
    Loading,
    Ready,
    /// Render whatever data is present alongside an error banner.
    Degraded { error: Option<&'a CatalogError> },
}

pub fn view_status(state: &CatalogState) -> ViewStatus<'_> {
    match state.status {
        LoadStatus::Idle => ViewStatus::NotLoaded,
        LoadStatus::Loading => ViewStatus::Loading,
        LoadStatus::Ready => ViewStatus::Ready,
        LoadStatus::Failed => ViewStatus::Degraded {
            error: state.error.as_ref(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_two_decimals_and_manat_sign() {
        assert_eq!(format_price(1299.5), "1299.50 ₼");
        assert_eq!(format_price(0.0), "0.00 ₼");
    }

    #[test]
    fn contact_links_strip_phone_formatting() {
        let entry = ContactEntry {
            name: "Satış şöbəsi".into(),
            phone: "+994 (50) 123-45-67".into(),
        };
        assert_eq!(
            contact_link(ContactGroupKey::Whatsapp, &entry),
            "https://wa.me/994501234567"
        );
        assert_eq!(
            contact_link(ContactGroupKey::Satis, &entry),
            "tel:994501234567"
        );
    }

    #[test]
    fn category_icons_cycle() {
        assert_eq!(category_icon(0), "📷");
        assert_eq!(category_icon(7), category_icon(0));
    }

    #[test]
    fn titles_follow_selection() {
        assert_eq!(selection_title(&Selection::All), ALL_PRODUCTS_TITLE);
        assert_eq!(
            selection_title(&Selection::Category("Kameralar".into())),
            "Kameralar"
        );
    }

    #[test]
    fn failed_state_renders_degraded() {
        let state = CatalogState {
            status: LoadStatus::Failed,
            ..CatalogState::default()
        };
        assert_eq!(view_status(&state), ViewStatus::Degraded { error: None });
        assert_eq!(view_status(&CatalogState::default()), ViewStatus::NotLoaded);
    }
}
