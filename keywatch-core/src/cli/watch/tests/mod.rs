mod render_tests;
mod stats_aggregation_tests;
