mod appointment_status;
mod board_column;
mod clock_time;
