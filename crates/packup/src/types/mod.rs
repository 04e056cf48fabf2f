pub mod build_plan;
