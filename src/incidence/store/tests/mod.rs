mod directed_tests;
mod trait_default_tests;
