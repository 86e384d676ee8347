mod graphql_config_tests;
