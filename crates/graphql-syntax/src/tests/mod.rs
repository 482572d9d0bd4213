mod ast_utils;
mod graphql_parser_operation_tests;
mod graphql_parser_source_slice_tests;
mod graphql_parser_value_tests;
mod property_tests;
mod syntax_classifier_tests;
mod utils;
