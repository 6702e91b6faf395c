// Domain layer: the shapes operations consume and produce. No behavior beyond container plumbing.

pub mod model;
