use db::models::order::TopProductRow;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TopProductItem {
    pub id: Uuid,
    pub name: String,
    pub revenue: f64,
    pub units: String,
}

impl From<TopProductRow> for TopProductItem {
    fn from(row: TopProductRow) -> Self {
        Self {
            id: row.product_id,
            name: row.name,
            revenue: row.revenue,
            units: format!("{} units", row.units),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopProductsResponse {
    #[serde(rename = "timeRange")]
    pub time_range: i32,
    pub products: Vec<TopProductItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_rendered_as_text() {
        let item = TopProductItem::from(TopProductRow {
            product_id: Uuid::new_v4(),
            name: "Pallet jack".to_string(),
            revenue: 25.0,
            units: 3,
        });
        assert_eq!(item.units, "3 units");
        assert_eq!(item.revenue, 25.0);
    }

    #[test]
    fn zero_units_are_rendered_as_text() {
        let item = TopProductItem::from(TopProductRow {
            product_id: Uuid::new_v4(),
            name: "Hand truck".to_string(),
            revenue: 0.0,
            units: 0,
        });
        assert_eq!(item.units, "0 units");
    }
}
