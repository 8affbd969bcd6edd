//! Test modules for the delimited text scanner
