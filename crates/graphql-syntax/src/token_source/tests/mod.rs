mod str_graphql_token_source_tests;
