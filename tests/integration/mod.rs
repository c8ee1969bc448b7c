// Integration tests for a-system
// This module organizes all integration tests
