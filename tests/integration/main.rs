mod helpers;
mod test_mls_points;
