pub mod simulated_submitter;
