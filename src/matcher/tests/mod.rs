mod fuzzy_tests;
