mod fragment_dependencies_tests;
mod operation_transformer_tests;
mod type_serializer_tests;
mod utils;
