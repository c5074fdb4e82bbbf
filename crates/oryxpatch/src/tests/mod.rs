mod dance;
