mod device_tests;
