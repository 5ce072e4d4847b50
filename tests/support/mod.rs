pub mod mock_field;
