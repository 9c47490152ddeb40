pub mod checkin_commands;
