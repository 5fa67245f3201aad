mod batch_runs;
mod config_files;
mod fake_provider;
mod openai_client;
mod single_file;
