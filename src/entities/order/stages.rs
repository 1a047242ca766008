//! Stages specific to the order pipelines

use super::model::{Order, OrderStatus};
use crate::core::DataService;
use crate::core::error::{GrubResult, ValidationError};
use crate::core::validation::{RequestContext, Stage, validators};
use async_trait::async_trait;
use serde_json::Value;

/// Every order line must carry a positive integer `quantity`
///
/// All offending lines are reported together, by index.
pub struct DishQuantities;

#[async_trait]
impl Stage<Order> for DishQuantities {
    fn name(&self) -> &str {
        "dish-quantities"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<Order>,
        _store: &dyn DataService<Order>,
    ) -> GrubResult<()> {
        let check = validators::positive_integer();
        let lines = ctx.field("dishes").as_array().map(Vec::as_slice).unwrap_or(&[]);

        let indices: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                let quantity = line.get("quantity").unwrap_or(&Value::Null);
                check("quantity", quantity).is_err()
                    || quantity.as_f64().is_some_and(|q| q > f64::from(u32::MAX))
            })
            .map(|(index, _)| index)
            .collect();

        if indices.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidQuantity { indices }.into())
        }
    }
}

fn status_value(value: &Value) -> GrubResult<OrderStatus> {
    value
        .as_str()
        .and_then(OrderStatus::parse)
        .ok_or_else(|| ValidationError::InvalidStatus.into())
}

/// A `status` supplied at creation must be one of the accepted values
///
/// Absent means the order starts out `pending`.
pub struct InitialStatus;

#[async_trait]
impl Stage<Order> for InitialStatus {
    fn name(&self) -> &str {
        "initial-status"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<Order>,
        _store: &dyn DataService<Order>,
    ) -> GrubResult<()> {
        match ctx.field("status") {
            Value::Null => Ok(()),
            value => status_value(value).map(|_| ()),
        }
    }
}

/// Status rules for an update
///
/// The incoming `status` is required and must be an accepted value. A stored
/// order that is already `delivered` cannot be updated at all, and an update
/// cannot set `delivered` itself.
pub struct UpdatableStatus;

#[async_trait]
impl Stage<Order> for UpdatableStatus {
    fn name(&self) -> &str {
        "updatable-status"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<Order>,
        _store: &dyn DataService<Order>,
    ) -> GrubResult<()> {
        let incoming = status_value(ctx.field("status"))?;
        let current = ctx.resolved()?.entity.status;

        if current.is_terminal() || incoming.is_terminal() {
            return Err(ValidationError::OrderFinalized.into());
        }
        Ok(())
    }
}

/// Only an order whose stored status is `pending` may be deleted
pub struct PendingOnly;

#[async_trait]
impl Stage<Order> for PendingOnly {
    fn name(&self) -> &str {
        "pending-only"
    }

    async fn run(
        &self,
        ctx: &mut RequestContext<Order>,
        _store: &dyn DataService<Order>,
    ) -> GrubResult<()> {
        match ctx.resolved()?.entity.status {
            OrderStatus::Pending => Ok(()),
            status => {
                tracing::debug!(%status, "refusing to delete order");
                Err(ValidationError::NotPending.into())
            }
        }
    }
}
