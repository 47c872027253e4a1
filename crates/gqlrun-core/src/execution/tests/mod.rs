mod concurrency_tests;
mod executor_tests;
mod variable_tests;
