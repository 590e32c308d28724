mod unit_test_macro;
