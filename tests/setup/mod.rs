mod bootstrap_tests;
mod scenario_tests;
