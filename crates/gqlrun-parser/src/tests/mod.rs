mod graphql_parser_parity_tests;
mod graphql_parser_tests;
mod graphql_token_stream_tests;
mod utils;
