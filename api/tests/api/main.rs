mod auth;
mod helpers;
mod routing;
mod startup;
