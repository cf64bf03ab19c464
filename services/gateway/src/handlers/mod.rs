pub mod match_result;
