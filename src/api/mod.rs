pub mod exchangerate;
