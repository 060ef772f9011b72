//! Control -> chart bindings.
//!
//! Every input control of the page is bound to the charts that depend on it.
//! When the page reports a new control value, all bound charts are rebuilt
//! from the shared dataset and sent back as one batch of updates.

use contracts::shared::callback::{CallbackRequest, ControlValue, OutputUpdate};
use contracts::shared::chart::Figure;
use std::collections::HashMap;

use super::{d400_global_sales, d401_products, d402_sales_channels};
use crate::shared::data::SalesDataset;
use crate::shared::dates::DateRange;
use crate::shared::error::DashboardError;

/// Kind of value a control emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DateRange,
    Selection,
}

impl EventKind {
    pub fn of(value: &ControlValue) -> Self {
        match value {
            ControlValue::DateRange { .. } => EventKind::DateRange,
            ControlValue::Selection { .. } => EventKind::Selection,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            EventKind::DateRange => "date range",
            EventKind::Selection => "selection",
        }
    }
}

pub type ChartHandler = fn(&SalesDataset, &ControlValue) -> Result<Figure, DashboardError>;

struct Binding {
    output_id: &'static str,
    handler: ChartHandler,
}

struct ControlEntry {
    event: EventKind,
    bindings: Vec<Binding>,
}

#[derive(Default)]
pub struct CallbackRegistry {
    controls: HashMap<String, ControlEntry>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind chart `output_id` to `control_id`. Outputs of one control are
    /// rebuilt in registration order.
    pub fn register(
        &mut self,
        control_id: &str,
        event: EventKind,
        output_id: &'static str,
        handler: ChartHandler,
    ) -> &mut Self {
        let entry = self
            .controls
            .entry(control_id.to_string())
            .or_insert_with(|| ControlEntry {
                event,
                bindings: Vec::new(),
            });
        debug_assert_eq!(entry.event, event, "control {control_id} registered twice with different events");
        entry.bindings.push(Binding { output_id, handler });
        self
    }

    /// Output ids bound to a control
    pub fn outputs(&self, control_id: &str) -> Vec<&'static str> {
        self.controls
            .get(control_id)
            .map(|e| e.bindings.iter().map(|b| b.output_id).collect())
            .unwrap_or_default()
    }

    pub fn dispatch(
        &self,
        dataset: &SalesDataset,
        request: &CallbackRequest,
    ) -> Result<Vec<OutputUpdate>, DashboardError> {
        let entry = self
            .controls
            .get(&request.control_id)
            .ok_or_else(|| DashboardError::UnknownControl(request.control_id.clone()))?;

        if EventKind::of(&request.value) != entry.event {
            return Err(DashboardError::UnexpectedControlValue {
                control_id: request.control_id.clone(),
                expected: entry.event.describe(),
            });
        }

        entry
            .bindings
            .iter()
            .map(|b| {
                Ok(OutputUpdate {
                    output_id: b.output_id.to_string(),
                    figure: (b.handler)(dataset, &request.value)?,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Dashboard bindings
// ---------------------------------------------------------------------------

/// Registry with the bindings of all three tabs
pub fn default_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    registry
        .register(
            d400_global_sales::layout::SALES_RANGE,
            EventKind::DateRange,
            d400_global_sales::layout::BAR_SALES,
            bar_sales,
        )
        .register(
            d400_global_sales::layout::SALES_RANGE,
            EventKind::DateRange,
            d400_global_sales::layout::CHOROPLETH_SALES,
            choropleth_sales,
        )
        .register(
            d401_products::layout::PROD_DROPDOWN,
            EventKind::Selection,
            d401_products::layout::BARH_PROD_SUBCAT,
            barh_prod_subcat,
        )
        .register(
            d402_sales_channels::layout::CHANNEL_DROPDOWN,
            EventKind::Selection,
            d402_sales_channels::layout::WEEKDAY_SALES,
            weekday_sales,
        )
        .register(
            d402_sales_channels::layout::CHANNEL_DROPDOWN,
            EventKind::Selection,
            d402_sales_channels::layout::COUNTRY_SALES,
            country_sales,
        )
        .register(
            d402_sales_channels::layout::CHANNEL_DROPDOWN,
            EventKind::Selection,
            d402_sales_channels::layout::GENDER_SALES,
            gender_sales,
        );
    registry
}

fn date_range(value: &ControlValue) -> Result<DateRange, DashboardError> {
    match value {
        ControlValue::DateRange {
            start_date,
            end_date,
        } => DateRange::parse(start_date, end_date),
        ControlValue::Selection { .. } => Err(DashboardError::UnexpectedControlValue {
            control_id: d400_global_sales::layout::SALES_RANGE.to_string(),
            expected: EventKind::DateRange.describe(),
        }),
    }
}

fn selection(value: &ControlValue) -> &str {
    match value {
        ControlValue::Selection { value } => value,
        // registry dispatch checks the event kind first; an empty selection matches nothing
        ControlValue::DateRange { .. } => "",
    }
}

fn bar_sales(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    let range = date_range(value)?;
    Ok(d400_global_sales::service::revenue_by_month_figure(ds, &range))
}

fn choropleth_sales(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    let range = date_range(value)?;
    Ok(d400_global_sales::service::revenue_by_country_figure(ds, &range))
}

fn barh_prod_subcat(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    Ok(d401_products::service::subcategories_by_gender_figure(
        ds,
        selection(value),
    ))
}

fn weekday_sales(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    Ok(d402_sales_channels::service::weekday_figure(ds, selection(value)))
}

fn country_sales(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    Ok(d402_sales_channels::service::countries_figure(ds, selection(value)))
}

fn gender_sales(ds: &SalesDataset, value: &ControlValue) -> Result<Figure, DashboardError> {
    Ok(d402_sales_channels::service::gender_figure(ds, selection(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::dataset::test_support::sample_dataset;

    fn request(control_id: &str, value: ControlValue) -> CallbackRequest {
        CallbackRequest {
            control_id: control_id.to_string(),
            value,
        }
    }

    fn selection_of(value: &str) -> ControlValue {
        ControlValue::Selection {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_channel_change_updates_three_charts() {
        let registry = default_registry();
        let updates = registry
            .dispatch(
                &sample_dataset(),
                &request("channel-dropdown", selection_of("e-Shop")),
            )
            .unwrap();

        let ids: Vec<_> = updates.iter().map(|u| u.output_id.as_str()).collect();
        assert_eq!(ids, vec!["weekday-sales", "country-sales", "gender-sales"]);
    }

    #[test]
    fn test_date_range_updates_bar_and_map() {
        let registry = default_registry();
        let updates = registry
            .dispatch(
                &sample_dataset(),
                &request(
                    "sales-range",
                    ControlValue::DateRange {
                        start_date: "2011-01-01".to_string(),
                        end_date: "2011-01-31T00:00:00".to_string(),
                    },
                ),
            )
            .unwrap();

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].output_id, "bar-sales");
        assert_eq!(updates[1].figure.point_count(), 2);
    }

    #[test]
    fn test_unknown_control_is_rejected() {
        let err = default_registry()
            .dispatch(&sample_dataset(), &request("nope", selection_of("x")))
            .unwrap_err();
        assert_eq!(err, DashboardError::UnknownControl("nope".to_string()));
    }

    #[test]
    fn test_wrong_value_kind_is_rejected() {
        let err = default_registry()
            .dispatch(&sample_dataset(), &request("sales-range", selection_of("x")))
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnexpectedControlValue { .. }));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = default_registry()
            .dispatch(
                &sample_dataset(),
                &request(
                    "sales-range",
                    ControlValue::DateRange {
                        start_date: "yesterday".to_string(),
                        end_date: "2011-01-31".to_string(),
                    },
                ),
            )
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_dispatch_is_repeatable() {
        let registry = default_registry();
        let ds = sample_dataset();
        let req = request("prod-dropdown", selection_of("Clothing"));
        assert_eq!(
            registry.dispatch(&ds, &req).unwrap(),
            registry.dispatch(&ds, &req).unwrap()
        );
    }

    #[test]
    fn test_outputs_lookup() {
        let registry = default_registry();
        assert_eq!(registry.outputs("prod-dropdown"), vec!["barh-prod-subcat"]);
        assert!(registry.outputs("missing").is_empty());
    }
}
