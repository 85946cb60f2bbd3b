mod attribute;
mod sub_option;
