//! Validator chains for the dish routes

use super::model::Dish;
use crate::core::resource::Pipelines;
use crate::core::validation::{FieldStage, IdMatchesRoute, Pipeline, ResolveById};

pub const NAME_REQUIRED: &str = "Dish must include a name.";
pub const DESCRIPTION_REQUIRED: &str = "Dish must include a description.";
pub const PRICE_INVALID: &str = "Dish must include a price and it must be an integer greater than 0.";
pub const IMAGE_URL_REQUIRED: &str = "Dish must include a image_url";

/// Field checks shared by create and update, in the order they run
fn field_checks(pipeline: Pipeline<Dish>) -> Pipeline<Dish> {
    pipeline
        .stage(FieldStage::required_text("name", NAME_REQUIRED))
        .stage(FieldStage::required_text("description", DESCRIPTION_REQUIRED))
        .stage(FieldStage::required("price", PRICE_INVALID))
        .stage(FieldStage::positive_number("price", PRICE_INVALID))
        .stage(FieldStage::required_text("image_url", IMAGE_URL_REQUIRED))
}

/// Dishes are never deleted
pub fn pipelines() -> Pipelines<Dish> {
    Pipelines {
        create: field_checks(Pipeline::new()),
        read: Pipeline::new().stage(ResolveById),
        update: field_checks(Pipeline::new().stage(ResolveById)).stage(IdMatchesRoute),
        delete: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let p = pipelines();
        assert_eq!(
            p.create.stage_names(),
            vec!["name", "description", "price", "price", "image_url"]
        );
        assert_eq!(
            p.update.stage_names(),
            vec![
                "resolve-by-id",
                "name",
                "description",
                "price",
                "price",
                "image_url",
                "id-matches-route"
            ]
        );
        assert!(p.delete.is_none());
    }
}
