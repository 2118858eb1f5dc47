use crate::record::{present, ItemRecord, SizePrice};
use serde_json::Value;

/// Size label that collapses to a bare price when it is the only tier.
const REGULAR: &str = "Regular";

/// Formats a price with no decimals when integral, two otherwise.
///
/// Pence are rounded half away from zero, so `4.125` prints as `4.13`.
#[allow(clippy::float_cmp)]
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        let pence = (price * 100.0).round() / 100.0;
        format!("{pence:.2}")
    }
}

/// Builds the parenthesised price suffix for an item.
///
/// Tiers without a usable size or price are skipped. A lone `Regular`
/// tier renders as ` (£5)`; anything else lists every tier with its size
/// label, ` (Small £3, Large £5)`.
pub fn format_size_price(entries: &[SizePrice]) -> String {
    let valid: Vec<(&str, f64)> = entries
        .iter()
        .filter_map(|entry| Some((present(entry.size.as_deref())?, entry.price?)))
        .collect();

    match valid.as_slice() {
        [] => String::new(),
        [(size, price)] if *size == REGULAR => format!(" (£{})", format_price(*price)),
        tiers => {
            let joined = tiers
                .iter()
                .map(|(size, price)| format!("{size} £{}", format_price(*price)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(" ({joined})")
        }
    }
}

/// Renders one item as a single display line: name, description, prices.
pub fn render_item(item: &ItemRecord) -> String {
    let mut line = item.name.clone().unwrap_or_default();

    if let Some(description) = item.description_text() {
        line.push_str(" – ");
        line.push_str(description);
    }

    if let Some(entries) = &item.size_price {
        line.push_str(&format_size_price(entries));
    }

    line
}

/// Renders an arbitrary JSON value the way a display line would show it.
///
/// Objects are treated as item records; everything else falls back to its
/// plain text form, with `null` rendering as empty text.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(values) => values.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => serde_json::from_value::<ItemRecord>(value.clone())
            .map(|item| render_item(&item))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::EMPTY;
    use serde_json::json;

    #[test]
    fn single_regular_tier_collapses_to_bare_price() {
        assert_eq!(format_size_price(&[SizePrice::new("Regular", 5.0)]), " (£5)");
        assert_eq!(format_size_price(&[SizePrice::new("Regular", 5.5)]), " (£5.50)");
    }

    #[test]
    fn half_pence_round_up() {
        assert_eq!(format_size_price(&[SizePrice::new("Regular", 4.125)]), " (£4.13)");
        assert_eq!(format_price(0.125), "0.13");
    }

    #[test]
    fn multiple_tiers_keep_size_labels_in_order() {
        let tiers = [SizePrice::new("Small", 3.0), SizePrice::new("Large", 5.0)];
        assert_eq!(format_size_price(&tiers), " (Small £3, Large £5)");
    }

    #[test]
    fn single_non_regular_tier_keeps_its_label() {
        assert_eq!(format_size_price(&[SizePrice::new("Pint", 4.25)]), " (Pint £4.25)");
    }

    #[test]
    fn no_usable_tiers_render_nothing() {
        assert_eq!(format_size_price(&[]), "");
        let sentinel = SizePrice {
            size: Some(EMPTY.to_string()),
            price: None,
        };
        assert_eq!(format_size_price(&[sentinel]), "");
    }

    #[test]
    fn invalid_tiers_are_skipped_before_the_regular_check() {
        let tiers = [
            SizePrice {
                size: Some("Large".to_string()),
                price: None,
            },
            SizePrice::new("Regular", 2.0),
        ];
        assert_eq!(format_size_price(&tiers), " (£2)");
    }

    #[test]
    fn item_line_joins_name_description_and_prices() {
        let item = ItemRecord::new("Flat White")
            .with_description("Velvety")
            .with_size_price(vec![SizePrice::new("Regular", 3.4)]);
        assert_eq!(render_item(&item), "Flat White – Velvety (£3.40)");
    }

    #[test]
    fn sentinel_description_is_omitted() {
        let item = ItemRecord::new("Water").with_description(EMPTY);
        assert_eq!(render_item(&item), "Water");
    }

    #[test]
    fn empty_price_list_adds_nothing() {
        let item = ItemRecord::new("Tap water").with_size_price(Vec::new());
        assert_eq!(render_item(&item), "Tap water");
    }

    #[test]
    fn non_object_values_render_as_plain_text() {
        assert_eq!(render_value(&Value::Null), "");
        assert_eq!(render_value(&json!("Daily special")), "Daily special");
        assert_eq!(render_value(&json!(7)), "7");
        assert_eq!(
            render_value(&json!({"name": "Scone", "sizePrice": [{"size": "Regular", "price": 2}]})),
            "Scone (£2)"
        );
    }
}
