use common::{error::Res, tenant::TenantScope};
use sqlx::PgPool;

use crate::dtos::analytics::TopProductItem;

pub const DEFAULT_TIME_RANGE_DAYS: i32 = 30;

/// Absent, unparsable or non-positive values fall back to the default
/// window; an analytics request never fails on a bad `timeRange`.
pub fn resolve_time_range(raw: Option<&str>) -> i32 {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|days| *days > 0)
        .unwrap_or(DEFAULT_TIME_RANGE_DAYS)
}

pub async fn top_products(
    pool: &PgPool,
    scope: &TenantScope,
    days: i32,
) -> Res<Vec<TopProductItem>> {
    let rows = db::order::top_products(pool, scope, days).await?;
    Ok(rows.into_iter().map(TopProductItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_time_range_uses_default() {
        assert_eq!(resolve_time_range(None), 30);
    }

    #[test]
    fn valid_time_range_is_used() {
        assert_eq!(resolve_time_range(Some("7")), 7);
        assert_eq!(resolve_time_range(Some(" 90 ")), 90);
    }

    #[test]
    fn invalid_time_range_falls_back_to_default() {
        assert_eq!(resolve_time_range(Some("soon")), 30);
        assert_eq!(resolve_time_range(Some("")), 30);
        assert_eq!(resolve_time_range(Some("12.5")), 30);
    }

    #[test]
    fn non_positive_time_range_falls_back_to_default() {
        assert_eq!(resolve_time_range(Some("0")), 30);
        assert_eq!(resolve_time_range(Some("-5")), 30);
    }
}
