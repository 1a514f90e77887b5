mod test_search;
