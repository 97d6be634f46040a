mod delivery_tests;
