mod selection_builder_tests;
