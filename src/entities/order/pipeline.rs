//! Validator chains for the order routes

use super::model::Order;
use super::stages::{DishQuantities, InitialStatus, PendingOnly, UpdatableStatus};
use crate::core::resource::Pipelines;
use crate::core::validation::{FieldStage, IdMatchesRoute, Pipeline, ResolveById};

pub const DELIVER_TO_REQUIRED: &str = "Order must include a deliverTo property.";
pub const MOBILE_NUMBER_REQUIRED: &str = "Order must include a mobileNumber property.";
pub const DISHES_REQUIRED: &str = "Order must include at least one dish.";

fn field_checks(pipeline: Pipeline<Order>) -> Pipeline<Order> {
    pipeline
        .stage(FieldStage::required_text("deliverTo", DELIVER_TO_REQUIRED))
        .stage(FieldStage::required_text("mobileNumber", MOBILE_NUMBER_REQUIRED))
        .stage(FieldStage::required("dishes", DISHES_REQUIRED))
        .stage(FieldStage::non_empty_array("dishes", DISHES_REQUIRED))
        .stage(DishQuantities)
}

pub fn pipelines() -> Pipelines<Order> {
    Pipelines {
        create: field_checks(Pipeline::new()).stage(InitialStatus),
        read: Pipeline::new().stage(ResolveById),
        update: field_checks(Pipeline::new().stage(ResolveById))
            .stage(IdMatchesRoute)
            .stage(UpdatableStatus),
        delete: Some(Pipeline::new().stage(ResolveById).stage(PendingOnly)),
    }
}
