mod casing_tests;
