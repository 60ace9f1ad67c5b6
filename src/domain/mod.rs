// Domain layer: the validated passenger and the rendered pass.

pub mod model;
