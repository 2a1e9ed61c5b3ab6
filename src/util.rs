pub mod mod12;
